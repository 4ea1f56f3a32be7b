use anyhow::{anyhow, Context, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, HtmlElement};

/// The slice of the DOM the widgets touch.
pub trait RenderTarget: Clone + 'static {
    type Node: Clone + 'static;

    fn create_element(&self, tag: &str) -> Result<Self::Node>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<()>;
    fn set_style(&self, node: &Self::Node, property: &str, value: &str) -> Result<()>;
    fn set_text(&self, node: &Self::Node, text: &str);
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<()>;
    fn append_to_body(&self, node: &Self::Node) -> Result<()>;
    /// Synchronous layout read, so the next style write is animated
    /// instead of being folded into the initial paint.
    fn force_layout(&self, node: &Self::Node);
    /// Detaches the node. Already-detached nodes are ignored.
    fn remove(&self, node: &Self::Node);
    fn find_by_id(&self, id: &str) -> Option<Self::Node>;
}

#[derive(Clone, Debug)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn current() -> Result<Self> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| anyhow!("no document on this page"))?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

impl RenderTarget for WebDocument {
    type Node = HtmlElement;

    fn create_element(&self, tag: &str) -> Result<HtmlElement> {
        self.document
            .create_element(tag)
            .map_err(js_err)
            .with_context(|| format!("creating <{}>", tag))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| anyhow!("<{}> is not an HTML element", tag))
    }

    fn set_attribute(&self, node: &HtmlElement, name: &str, value: &str) -> Result<()> {
        node.set_attribute(name, value)
            .map_err(js_err)
            .with_context(|| format!("setting attribute {}", name))
    }

    fn set_style(&self, node: &HtmlElement, property: &str, value: &str) -> Result<()> {
        node.style()
            .set_property(property, value)
            .map_err(js_err)
            .with_context(|| format!("setting style {}", property))
    }

    fn set_text(&self, node: &HtmlElement, text: &str) {
        node.set_text_content(Some(text));
    }

    fn append_child(&self, parent: &HtmlElement, child: &HtmlElement) -> Result<()> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(js_err)
            .context("appending child")
    }

    fn append_to_body(&self, node: &HtmlElement) -> Result<()> {
        let body = self
            .document
            .body()
            .ok_or_else(|| anyhow!("document has no body"))?;
        body.append_child(node)
            .map(|_| ())
            .map_err(js_err)
            .context("appending to body")
    }

    fn force_layout(&self, node: &HtmlElement) {
        let _ = node.offset_height();
    }

    fn remove(&self, node: &HtmlElement) {
        node.remove();
    }

    fn find_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}
