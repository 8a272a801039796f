pub mod dispatch;

mod chat;
mod history;
mod login;
mod profile;
mod register;
mod report;
mod session;
mod shared;
