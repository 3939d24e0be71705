pub mod movement;
