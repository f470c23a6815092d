pub mod dino_service;
pub mod dto;
