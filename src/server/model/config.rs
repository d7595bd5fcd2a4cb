use std::net::SocketAddrV4;

/// Server configs
#[derive(Debug)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    /// postgres connection string, orders are kept in memory when absent
    pub db_conn_str: Option<String>,
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, db_conn_str: Option<String>) -> Self {
        Self {
            addr,
            db_conn_str,
        }
    }
}
