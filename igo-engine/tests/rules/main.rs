mod common;

mod capture;
mod pass;
mod suicide;
