use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Res, config, convert::Converter, info, server};

pub async fn serve(addr: Option<String>) -> Res<()> {
    let addr = addr.unwrap_or_else(config::server_addr);
    let addr = SocketAddr::from_str(&addr)
        .map_err(|e| format!("Failed to parse server address {}: {}", addr, e))?;

    let settings = config::Settings::from_env();
    let converter = Arc::new(Converter::new(&settings)?);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Converter available at http://{}", listener.local_addr()?);

    server::serve(listener, converter).await
}
