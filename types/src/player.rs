use std::fmt::Debug;

use uuid::Uuid;

use crate::game_state::TableView;

/// Decides whether the acting player keeps drawing after a card that allows it.
pub trait Strategy: Debug {
    fn draw_again(&mut self, view: &TableView) -> bool;
}

#[derive(Debug)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self::new_with_id(Uuid::new_v4(), name, strategy)
    }

    pub fn new_with_id(id: Uuid, name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            id,
            name: name.into(),
            strategy,
        }
    }
}
