pub mod card;
pub mod deck;
pub mod error;
pub mod game_state;
pub mod octopus;
pub mod player;
pub mod rng;
pub mod steal;

pub use card::{Action, Card, Style};
pub use deck::{build_deck, Deck, DECK_SIZE};
pub use error::GameError;
pub use game_state::{Event, GameState, Outcome, Resolution, TableView};
pub use octopus::Octopus;
pub use player::{Player, Strategy};
pub use rng::GameRng;
pub use steal::steal;
