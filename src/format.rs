use crate::{
    model::GeneratedPaper,
    prompt::ABSTRACT_LABEL
};

pub const BANNER: &str = "Here's your abstract!";

pub struct Formatter;

impl Formatter {
    pub fn to_console(paper: &GeneratedPaper) -> String {
        format!("{}\n\n{} {}{}\n",
            BANNER,
            paper.title,
            ABSTRACT_LABEL,
            paper.abstract_text
        )
    }
}
