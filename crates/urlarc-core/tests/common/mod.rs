#![allow(dead_code)]

pub mod save_server;
