pub mod preview_dto;
