mod common;
mod report;
mod repository;
