mod common_endpoints;
mod embed;
