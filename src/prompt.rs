// the abstract prompt extends the title prompt. eg: prompt = TITLE_PROMPT + title + ABSTRACT_LABEL
pub const PROMPT_PREFIX: &str =
    "The following paper won a prize at this year's most prestigious conference for ";
pub const TITLE_SUFFIX: &str = ":\n\nTitle:";
pub const ABSTRACT_LABEL: &str = "\nAbstract:\n";

pub const TITLE_MAX_TOKENS: u32 = 40;
pub const ABSTRACT_MAX_TOKENS: u32 = 400;
pub const STOP_SEQUENCE: &str = "\n";

pub fn prompt_for_field(field: &str) -> String {
    format!("{}{}{}", PROMPT_PREFIX, field, TITLE_SUFFIX)
}

pub fn prompt_for_abstract(field: &str, title: &str) -> String {
    format!("{}{}{}", prompt_for_field(field), title, ABSTRACT_LABEL)
}
