/// The Discord user that triggered a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoker {
    pub discord_user_id: u64,
    pub name: String,
    pub global_name: Option<String>,
}

impl Invoker {
    pub fn new(discord_user_id: u64, name: impl Into<String>) -> Self {
        Self {
            discord_user_id,
            name: name.into(),
            global_name: None,
        }
    }

    pub fn with_global_name(mut self, global_name: Option<String>) -> Self {
        self.global_name = global_name;
        self
    }

    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.name)
    }
}
