mod account;
mod follow_edge;
mod new_account;
