pub mod catalog;
pub mod commands;
pub mod countdown;
pub mod form;
pub mod http;
pub mod platform;
pub mod routes;
pub mod runtime;
pub mod view;
