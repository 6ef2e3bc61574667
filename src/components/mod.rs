pub mod ui;

mod entity_dialog;
mod entity_table;
mod stat_cards;
mod toast;
mod workspace;

pub(crate) use entity_dialog::EntityDialog;
pub(crate) use entity_table::{Avatar, EntityTable};
pub(crate) use stat_cards::StatCards;
pub(crate) use toast::Toast;
pub(crate) use workspace::EntityWorkspace;
