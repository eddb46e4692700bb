/// Options for the title-merge decorator
///
/// Attribute names are namespaced with the host dialect's prefix; the
/// defaults use the `deco:` prefix this engine registers under.
#[derive(Debug, Clone)]
pub struct DecoratorOptions {
    /// Tag name of the title-equivalent element
    pub title_tag: String,

    /// Attribute carrying the title pattern directive
    pub pattern_attribute: String,

    /// Attribute carrying an already-evaluated text expression
    pub text_attribute: String,
}

impl Default for DecoratorOptions {
    fn default() -> Self {
        Self {
            title_tag: "title".to_string(),
            pattern_attribute: "deco:title-pattern".to_string(),
            text_attribute: "deco:text".to_string(),
        }
    }
}
