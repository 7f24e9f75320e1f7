use catalogo_lib::prelude::CharacterInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub status: String,
    pub image_url: String,
    pub origin_name: String,
}

impl From<CharacterInfo> for Character {
    fn from(info: CharacterInfo) -> Self {
        Self {
            id: info.id,
            name: info.name,
            species: info.species,
            status: info.status,
            image_url: info.image,
            origin_name: info.origin.map(|origin| origin.name).unwrap_or_default(),
        }
    }
}
