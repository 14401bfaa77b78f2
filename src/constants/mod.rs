pub mod snowman;
