use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{RegistryError, TickError};
use crate::render::Surface;
use crate::simulation::TickContext;

/// Shared handle to an entity. The registry and whoever built the entity may
/// both hold one; all access happens on the tick thread.
pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

pub trait Entity {
    fn name(&self) -> &str;
    fn update(&mut self, ctx: &mut TickContext) -> Result<(), TickError>;
    fn draw(&self, surface: &mut dyn Surface);
}

/// Drives update and draw for every registered entity, always in the order
/// the entities were first registered.
#[derive(Default)]
pub struct Registry {
    order: Vec<String>,
    entities: HashMap<String, Shared<dyn Entity>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering a name twice replaces the entity but keeps its original slot.
    pub fn register(&mut self, entity: Shared<dyn Entity>) {
        let name = entity.borrow().name().to_string();
        if self.entities.insert(name.clone(), entity).is_none() {
            self.order.push(name);
        }
    }

    pub fn lookup(&self, name: &str) -> Result<Shared<dyn Entity>, RegistryError> {
        self.entities
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Stops at the first failing entity. Updates already applied this tick
    /// are kept.
    pub fn update_all(&self, ctx: &mut TickContext) -> Result<(), TickError> {
        for entity in self.iter() {
            let mut entity = entity.try_borrow_mut().map_err(|_| TickError::EntityBusy {
                name: self.busy_name(entity),
            })?;
            entity.update(ctx)?;
        }
        Ok(())
    }

    pub fn draw_all(&self, surface: &mut dyn Surface) {
        for entity in self.iter() {
            match entity.try_borrow() {
                Ok(entity) => entity.draw(surface),
                Err(_) => log::warn!("Skipping draw of busy entity {}", self.busy_name(entity)),
            }
        }
    }

    pub fn names(&self) -> &[String] {
        &self.order
    }

    fn iter(&self) -> impl Iterator<Item = &Shared<dyn Entity>> {
        self.order.iter().filter_map(|name| self.entities.get(name))
    }

    fn busy_name(&self, entity: &Shared<dyn Entity>) -> String {
        self.entities
            .iter()
            .find(|(_, stored)| Rc::ptr_eq(stored, entity))
            .map(|(name, _)| name.clone())
            .unwrap_or_default()
    }
}
