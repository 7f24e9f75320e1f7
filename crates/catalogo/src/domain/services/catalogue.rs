use crate::domain::entities::{character::Character, page::LoadMode};

/// Characters fetched so far, in the order they arrived
#[derive(Debug, Clone, Default)]
pub struct CatalogueState {
    characters: Vec<Character>,
}

impl CatalogueState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, characters: Vec<Character>) {
        self.characters.extend(characters);
    }

    pub fn replace(&mut self, characters: Vec<Character>) {
        self.characters = characters;
    }

    pub fn apply(&mut self, mode: LoadMode, characters: Vec<Character>) {
        match mode {
            LoadMode::Append => self.append(characters),
            LoadMode::Replace => self.replace(characters),
        }
    }

    pub fn all(&self) -> &[Character] {
        &self.characters
    }

    pub fn find(&self, id: i64) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }
}
