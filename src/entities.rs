use glam::Vec3;

use crate::scene::NodeId;

pub const ABOUT_ME_ID: &str = "about-me";
pub const RESUME_DOOR_ID: &str = "resume-door";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityCategory {
    ProjectFrame,
    InfoPedestal,
    ExitDoor,
}

/// Something in the scene that reacts to a pick
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveEntity {
    pub id: String,
    pub category: EntityCategory,
    /// World position of the tagged node
    pub position: Vec3,
    /// Unit normal of the side facing the visitor
    pub facing: Vec3,
    /// Node carrying the identifier
    pub node: NodeId,
    open: bool,
}

impl InteractiveEntity {
    pub fn new(id: &str, category: EntityCategory, position: Vec3, facing: Vec3, node: NodeId) -> Self {
        Self {
            id: id.to_string(),
            category,
            position,
            facing: facing.normalize_or_zero(),
            node,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Set the one-shot open flag. Returns false if it was already set.
    pub fn mark_open(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entities: Vec<InteractiveEntity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity: InteractiveEntity) {
        self.entities.push(entity);
    }

    pub fn get(&self, id: &str) -> Option<&InteractiveEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut InteractiveEntity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn of_category(&self, category: EntityCategory) -> impl Iterator<Item = &InteractiveEntity> {
        self.entities.iter().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
