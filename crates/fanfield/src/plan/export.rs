//! Plain CSV export of plan sections.
//!
//! Readers split on bare commas, so commas are stripped from every free-text
//! cell instead of quoting.

use std::io::{self, Write};

use super::PlanSection;

pub const CSV_HEADER: &str = "Section,Step ID,Portal Name,Action,Check";

fn strip_commas(s: &str) -> String {
    s.replace(',', "")
}

/// Header plus one row per step; actions are joined with ` | ` and the check column is blank.
pub fn render_csv(sections: &[PlanSection]) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');
    for sect in sections {
        let title = strip_commas(&sect.title);
        for step in &sect.steps {
            let actions = strip_commas(&step.actions.join(" | "));
            out.push_str(&format!(
                "{title},{},{},{actions}, \n",
                strip_commas(&step.label),
                strip_commas(&step.name)
            ));
        }
    }
    out
}

pub fn write_csv<W: Write>(sections: &[PlanSection], mut w: W) -> io::Result<()> {
    w.write_all(render_csv(sections).as_bytes())?;
    w.flush()
}
