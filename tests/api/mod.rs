mod auth;
mod employee;
mod planner;
mod public;
mod teacher;
