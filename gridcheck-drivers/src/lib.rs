//! Driver layer for browser automation.
//!
//! This crate exposes the WebDriver wrapper the scenarios use to reach the
//! dashboard under test.
//!
//! - [`browser::driver::Driver`]: WebDriver client wrapper
//! - [`browser::page::Page`]: DOM helpers and table snapshot capture
//! - [`browser::typing::InputPacer`]: paced keystrokes for login fields
pub mod browser;
