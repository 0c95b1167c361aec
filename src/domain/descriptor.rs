//! In-memory descriptor documents.
//!
//! Descriptors are built as ordered element trees and only serialized at the
//! edge, so generation can be inspected without parsing XML back.

/// A named element holding optional text and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), text: None, children: Vec::new() }
    }

    /// Append a new child element and return it for further population.
    pub fn add_element(&mut self, name: &str) -> &mut Element {
        let idx = self.children.len();
        self.children.push(Element::new(name));
        &mut self.children[idx]
    }

    /// Append a child element holding only text.
    pub fn add_text_element(&mut self, name: &str, text: &str) -> &mut Self {
        self.add_element(name).set_text(text);
        self
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Text of the first element reached by a `/`-separated path of child names.
    pub fn find_text(&self, path: &str) -> Option<&str> {
        path.split('/').try_fold(self, |element, segment| element.child(segment))?.text()
    }
}

/// A descriptor document with a single root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root_name: &str) -> Self {
        Self { root: Element::new(root_name) }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }
}

/// A security constraint derived from one endpoint's web context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityConstraintEntry {
    pub resource_name: String,
    pub url_pattern: String,
    pub http_methods: Vec<&'static str>,
    pub roles: Option<Vec<String>>,
    pub transport_guarantee: Option<String>,
}

impl SecurityConstraintEntry {
    /// Render as a `<security-constraint>` child of `web_app`.
    pub fn append_to(&self, web_app: &mut Element) {
        let constraint = web_app.add_element("security-constraint");

        let collection = constraint.add_element("web-resource-collection");
        collection
            .add_text_element("web-resource-name", &self.resource_name)
            .add_text_element("url-pattern", &self.url_pattern);
        for method in &self.http_methods {
            collection.add_text_element("http-method", method);
        }

        if let Some(roles) = &self.roles {
            let auth = constraint.add_element("auth-constraint");
            for role in roles {
                auth.add_text_element("role-name", role);
            }
        }

        if let Some(guarantee) = &self.transport_guarantee {
            constraint
                .add_element("user-data-constraint")
                .add_text_element("transport-guarantee", guarantee);
        }
    }
}
