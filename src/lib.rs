/*
By: <Draydon Levesque>
Date: 2026-10-19
Program Details: <Falling shapes toy - shared logic for native and web builds>
*/

pub mod modules;
