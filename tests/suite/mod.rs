mod nesting;
mod scenarios;
