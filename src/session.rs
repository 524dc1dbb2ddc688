use crate::errors::SessionError;

/// Session context owned by the presentation layer. Holds the trainer name
/// entered on the welcome screen and guards the Pokedex screens behind it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainerSession {
    trainer_name: Option<String>,
}

impl TrainerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_trainer_name(&mut self, name: &str) -> Result<(), SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        self.trainer_name = Some(name.to_string());
        Ok(())
    }

    pub fn trainer_name(&self) -> Option<&str> {
        self.trainer_name.as_deref()
    }

    /// Route guard for the catalog and detail screens.
    pub fn can_enter_pokedex(&self) -> bool {
        self.trainer_name.is_some()
    }

    pub fn greeting(&self) -> Option<String> {
        self.trainer_name
            .as_deref()
            .map(|name| format!("{}, you are now in your Pokedex.", name))
    }
}
