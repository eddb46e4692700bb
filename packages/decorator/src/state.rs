/// Per-decoration-pass title state shared with later pipeline stages.
///
/// The host allocates one of these per document assembly; concurrent
/// passes each get their own, so no locking is needed. Writes happen at
/// most once per pass and silently overwrite stale values if the host
/// reuses the object across passes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecorationPassState {
    content_title: Option<String>,
    layout_title: Option<String>,
    resulting_title: Option<String>,
}

impl DecorationPassState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_content_title(&mut self, value: impl Into<String>) {
        self.content_title = Some(value.into());
    }

    pub fn set_layout_title(&mut self, value: impl Into<String>) {
        self.layout_title = Some(value.into());
    }

    pub fn set_resulting_title(&mut self, value: impl Into<String>) {
        self.resulting_title = Some(value.into());
    }

    pub fn content_title(&self) -> Option<&str> {
        self.content_title.as_deref()
    }

    pub fn layout_title(&self) -> Option<&str> {
        self.layout_title.as_deref()
    }

    pub fn resulting_title(&self) -> Option<&str> {
        self.resulting_title.as_deref()
    }
}
