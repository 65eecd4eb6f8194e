use serde::{Deserialize, Serialize};

/// One required skill attached to a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub skill_name: String,

    /// Proficiency level ("junior", "pleno", "senior"…)
    pub required_level: Option<String>,
}

impl Skill {
    /// Tag label as shown in the detail view: `name (level)`
    pub fn label(&self) -> String {
        match &self.required_level {
            Some(level) => format!("{} ({})", self.skill_name, level),
            None => self.skill_name.clone(),
        }
    }
}
