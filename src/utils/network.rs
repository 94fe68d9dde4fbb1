// ============================================================================
// Local Address Discovery
// ============================================================================

use crate::errors::{UtilityError, UtilityResult};
use std::net::{IpAddr, Ipv4Addr};

/// Pick the first IPv4 address that is not a loopback address.
pub fn first_non_loopback_ipv4<I>(addrs: I) -> Option<Ipv4Addr>
where
    I: IntoIterator<Item = IpAddr>,
{
    addrs.into_iter().find_map(|addr| match addr {
        IpAddr::V4(v4) if !v4.is_loopback() => Some(v4),
        _ => None,
    })
}

/// Return the first non-loopback IPv4 address assigned to this host.
///
/// Interfaces are visited in the order the operating system reports them.
///
/// # Errors
/// - `InterfaceEnumeration` if the interface list cannot be read
/// - `NoAddressFound` if no interface has a non-loopback IPv4 address
pub fn local_non_loopback_ipv4() -> UtilityResult<Ipv4Addr> {
    let interfaces = if_addrs::get_if_addrs()?;
    tracing::trace!(count = interfaces.len(), "enumerated network interfaces");

    match first_non_loopback_ipv4(interfaces.iter().map(|iface| iface.ip())) {
        Some(ip) => {
            tracing::debug!(%ip, "found local address");
            Ok(ip)
        },
        None => Err(UtilityError::NoAddressFound),
    }
}
