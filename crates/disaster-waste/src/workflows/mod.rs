pub mod waste;
