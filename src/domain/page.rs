use serde::Serialize;

// the variables a page template may reference. both pages share this schema,
// and handlers build it before a render is attempted, so a mistyped variable
// is a compile error in the handler rather than a render-time surprise
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageVars {
    pub title: String,
    pub name: String,
}

impl PageVars {
    pub fn new(title: &str, name: &str) -> Self {
        Self {
            title: title.to_string(),
            name: name.to_string(),
        }
    }
}
