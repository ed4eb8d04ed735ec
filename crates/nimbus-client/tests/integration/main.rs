mod helpers;

mod contract_test;
mod handshake_test;
mod locations_test;
