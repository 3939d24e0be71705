use crate::api::types::EntityId;
use crate::components::avatar::Avatar;
use crate::components::entity::{Entity, Spawn};
use crate::core::collision::{overlapping_indices, Aabb};

/// Entity registry for one level: a flat Vec of static entities plus a
/// dedicated avatar slot. Designed for small levels (hundreds of entities).
pub struct Scene {
    pub(crate) entities: Vec<Entity>,
    pub(crate) avatar: Option<Avatar>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a scene with a specific entity capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
            avatar: None,
            next_id: 1,
        }
    }

    fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an entity. An avatar spawn replaces any existing avatar; anything
    /// else is appended to the static entities. Returns the assigned id.
    pub fn add(&mut self, spawn: Spawn) -> EntityId {
        let id = self.next_id();
        match spawn {
            Spawn::Avatar { pos } => {
                if let Some(previous) = self.avatar.replace(Avatar::new(id, pos)) {
                    log::debug!("Scene: avatar {:?} replaced by {:?}", previous.id(), id);
                }
            }
            Spawn::Static { kind, pos, size } => {
                self.entities.push(Entity::new(id, kind, pos, size));
            }
        }
        id
    }

    /// Remove every static entity and the avatar.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.avatar = None;
    }

    /// The current avatar, if any.
    pub fn avatar(&self) -> Option<&Avatar> {
        self.avatar.as_ref()
    }

    pub fn avatar_mut(&mut self) -> Option<&mut Avatar> {
        self.avatar.as_mut()
    }

    /// Get a static entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    /// All static entities as a slice.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of static entities (the avatar is not counted).
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether there are no static entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Box of any entity in the scene, avatar included.
    pub fn aabb_of(&self, id: EntityId) -> Option<Aabb> {
        match &self.avatar {
            Some(avatar) if avatar.id() == id => Some(avatar.aabb()),
            _ => self.get(id).map(Entity::aabb),
        }
    }

    /// Every entity (statics then the avatar) whose box overlaps the box of
    /// `test`, excluding `test` itself. Unknown ids yield an empty list.
    pub fn query_overlapping(&self, test: EntityId) -> Vec<EntityId> {
        let Some(probe) = self.aabb_of(test) else {
            return Vec::new();
        };
        let mut hits: Vec<EntityId> = overlapping_indices(&self.entities, &probe)
            .into_iter()
            .map(|i| self.entities[i].id())
            .filter(|&id| id != test)
            .collect();
        if let Some(avatar) = &self.avatar {
            if avatar.id() != test && avatar.aabb().overlaps(&probe) {
                hits.push(avatar.id());
            }
        }
        hits
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
