use anyhow::Result;
use uuid::Uuid;

use crate::models::{
    ToastVariant, TOAST_BACKGROUND, TOAST_DISPLAY_MS, TOAST_FONT, TOAST_TRANSITION_MS,
};
use crate::services::dom::RenderTarget;
use crate::services::scheduler::Scheduler;
use crate::utils;

const OFFSCREEN: &str = "translateX(120%)";
const ONSCREEN: &str = "translateX(0)";
const TRANSITION: &str = "transform 0.5s cubic-bezier(0.68, -0.55, 0.265, 1.55)";

const CONTAINER_STYLES: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("bottom", "30px"),
    ("right", "30px"),
    ("background", TOAST_BACKGROUND),
    ("color", "white"),
    ("padding", "16px 28px"),
    ("border-radius", "12px"),
    ("box-shadow", "0 10px 30px rgba(0,0,0,0.3)"),
    ("z-index", "10000"),
    ("font-family", TOAST_FONT),
    ("display", "flex"),
    ("align-items", "center"),
    ("gap", "12px"),
    ("transform", OFFSCREEN),
    ("transition", TRANSITION),
];

/// Identifies a toast that is on screen or about to leave it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastHandle {
    pub element_id: String,
}

pub struct ToastPresenter<R: RenderTarget, S: Scheduler> {
    target: R,
    scheduler: S,
}

impl<R: RenderTarget, S: Scheduler> ToastPresenter<R, S> {
    pub fn new(target: R, scheduler: S) -> Self {
        Self { target, scheduler }
    }

    /// Slides a notification in at the bottom-right corner and schedules its
    /// exit. Every call gets its own element; toasts are not stacked.
    pub fn show(&self, message: &str, variant: ToastVariant) -> Result<ToastHandle> {
        let t = &self.target;
        let element_id = format!("toast-{}", Uuid::new_v4());

        let toast = t.create_element("div")?;
        t.set_attribute(&toast, "id", &element_id)?;
        t.set_attribute(&toast, "class", "storefront-toast")?;
        t.set_attribute(&toast, "role", "status")?;
        for (property, value) in CONTAINER_STYLES {
            t.set_style(&toast, property, value)?;
        }

        let icon = t.create_element("i")?;
        t.set_attribute(&icon, "class", &format!("fas {}", variant.icon_class()))?;
        t.set_style(&icon, "color", variant.accent())?;
        t.set_style(&icon, "font-size", "20px")?;

        // Text content, so markup in the message is shown verbatim.
        let text = t.create_element("span")?;
        t.set_style(&text, "font-weight", "500")?;
        t.set_style(&text, "letter-spacing", "0.5px")?;
        t.set_text(&text, message);

        t.append_child(&toast, &icon)?;
        t.append_child(&toast, &text)?;
        t.append_to_body(&toast)?;

        if let Err(e) = self.slide_in(&toast) {
            t.remove(&toast);
            return Err(e);
        }

        Ok(ToastHandle { element_id })
    }

    fn slide_in(&self, toast: &R::Node) -> Result<()> {
        self.target.force_layout(toast);
        self.target.set_style(toast, "transform", ONSCREEN)?;

        let target = self.target.clone();
        let scheduler = self.scheduler.clone();
        let toast = toast.clone();
        self.scheduler.schedule(
            TOAST_DISPLAY_MS,
            Box::new(move || {
                if let Err(e) = target.set_style(&toast, "transform", OFFSCREEN) {
                    utils::warn(&format!("toast slide-out failed: {:#}", e));
                }
                let exit_target = target.clone();
                let exit_node = toast.clone();
                let removed = scheduler.schedule(
                    TOAST_TRANSITION_MS,
                    Box::new(move || exit_target.remove(&exit_node)),
                );
                if let Err(e) = removed {
                    // Without a second timer the element would linger off-screen.
                    utils::warn(&format!("toast removal timer failed: {:#}", e));
                    target.remove(&toast);
                }
            }),
        )
    }
}
