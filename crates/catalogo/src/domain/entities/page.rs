use catalogo_lib::prelude::CharacterPage;

use super::character::Character;

/// One page of characters together with the cursors around it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub results: Vec<Character>,
    pub next: Option<String>,
    pub prev: Option<String>,
}

impl From<CharacterPage> for Page {
    fn from(page: CharacterPage) -> Self {
        Self {
            results: page.results.into_iter().map(Character::from).collect(),
            next: page.info.next.filter(|url| !url.is_empty()),
            prev: page.info.prev.filter(|url| !url.is_empty()),
        }
    }
}

/// How a fetched page is merged into the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    Append,
    Replace,
}
