mod drops;
mod funder;
mod keys;
