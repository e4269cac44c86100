pub mod message_bubble;
pub mod source_card;
pub mod view;
pub mod view_model;
