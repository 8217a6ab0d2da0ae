use std::{
    fmt, io, mem,
    os::fd::{AsRawFd, FromRawFd, OwnedFd},
    os::raw::{c_int, c_void},
    ptr,
};
use libc::{
    can_filter, can_frame, sa_family_t, sockaddr, sockaddr_can, socklen_t, AF_CAN,
    CAN_RAW_FILTER, PF_CAN, SOCK_RAW, SOL_CAN_RAW,
};
use rawcan::{CanDevice, CanError, CanFilter, CanFrame, MAX_FRAME_SIZE};

const FRAME_SIZE: usize = mem::size_of::<can_frame>();

/// CAN socket address: the interface binding for a raw socket.
///
/// An index of zero binds to every CAN interface at once.  This is based
/// on, and compatible with, the `sockaddr_can` struct from libc.
#[derive(Clone, Copy)]
pub struct CanAddr(sockaddr_can);

impl CanAddr {
    /// Creates an address for the interface with the given index.
    pub fn new(ifindex: u32) -> Self {
        let mut addr = Self::default();
        addr.0.can_ifindex = ifindex as c_int;
        addr
    }

    /// Looks the interface up by name.
    pub fn from_iface(ifname: &str) -> Result<Self, CanError> {
        let ifindex = nix::net::if_::if_nametoindex(ifname)
            .map_err(|e| CanError::BadInterface(format!("{ifname}: {e}")))?;
        Ok(Self::new(ifindex))
    }

    /// Stores the transport-protocol id pair carried in the address.  The
    /// raw CAN protocol ignores these; other protocol numbers may bind on
    /// them.
    pub fn set_tp_ids(&mut self, tx_id: u32, rx_id: u32) {
        self.0.can_addr.tp = libc::__c_anonymous_sockaddr_can_tp { rx_id, tx_id };
    }

    fn as_sockaddr_ptr(&self) -> *const sockaddr {
        (&self.0 as *const sockaddr_can).cast()
    }

    fn len() -> usize {
        mem::size_of::<sockaddr_can>()
    }
}

impl Default for CanAddr {
    fn default() -> Self {
        let mut addr: sockaddr_can = unsafe { mem::zeroed() };
        addr.can_family = AF_CAN as sa_family_t;
        Self(addr)
    }
}

impl fmt::Debug for CanAddr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CanAddr {{ can_family: {}, can_ifindex: {} }}",
            self.0.can_family, self.0.can_ifindex
        )
    }
}

/// A raw CAN socket bound to an interface (or to all of them).
///
/// The descriptor is owned; it is released on every exit path when the
/// socket is dropped.
#[derive(Debug)]
pub struct RawCanSocket {
    fd: OwnedFd,
}

impl RawCanSocket {
    /// Opens a raw CAN socket with the given protocol number and binds it
    /// to the address.
    pub fn open(protocol: c_int, addr: &CanAddr) -> Result<Self, CanError> {
        let fd = unsafe { libc::socket(PF_CAN, SOCK_RAW, protocol) };
        if fd == -1 {
            return Err(last_os_error());
        }
        let fd = unsafe { OwnedFd::from_raw_fd(fd) };

        let ret = unsafe {
            libc::bind(
                fd.as_raw_fd(),
                addr.as_sockaddr_ptr(),
                CanAddr::len() as socklen_t,
            )
        };
        if ret == -1 {
            return Err(last_os_error());
        }

        Ok(Self { fd })
    }

    /// Installs receive filters on the socket, so the kernel only delivers
    /// matching frames.
    pub fn set_filters(&self, filters: &[CanFilter]) -> Result<(), CanError> {
        let filters: Vec<can_filter> = filters
            .iter()
            .map(|f| can_filter {
                can_id: f.can_id,
                can_mask: f.can_mask,
            })
            .collect();
        set_socket_option_mult(self.fd.as_raw_fd(), SOL_CAN_RAW, CAN_RAW_FILTER, &filters)
            .map_err(|e| CanError::OperationError(e.to_string()))
    }

    /// Blocking read of a single frame.
    fn read_frame(&self) -> Result<CanFrame, CanError> {
        let mut frame = can_frame_default();
        let rd = unsafe {
            libc::read(
                self.fd.as_raw_fd(),
                &mut frame as *mut _ as *mut c_void,
                FRAME_SIZE,
            )
        };
        if rd != FRAME_SIZE as isize {
            return Err(last_os_error());
        }

        let length = (frame.can_dlc as usize).min(MAX_FRAME_SIZE);
        CanFrame::from_wire(frame.can_id, &frame.data[..length])
            .ok_or_else(|| CanError::OperationError("malformed frame".into()))
    }

    /// Blocking write of a single frame; a short write is an error.
    fn write_frame(&self, frame: &CanFrame) -> Result<(), CanError> {
        let mut raw = can_frame_default();
        raw.can_id = frame.wire_id();
        raw.can_dlc = frame.length() as u8;
        raw.data[..frame.length()].copy_from_slice(frame.data());

        let wr = unsafe {
            libc::write(
                self.fd.as_raw_fd(),
                &raw as *const _ as *const c_void,
                FRAME_SIZE,
            )
        };
        if wr != FRAME_SIZE as isize {
            return Err(last_os_error());
        }
        Ok(())
    }
}

impl CanDevice for RawCanSocket {
    #[inline]
    fn transmit(&mut self, frame: &CanFrame) -> Result<(), CanError> {
        self.write_frame(frame)
    }

    #[inline]
    fn receive(&mut self) -> Result<CanFrame, CanError> {
        self.read_frame()
    }
}

fn last_os_error() -> CanError {
    CanError::OperationError(io::Error::last_os_error().to_string())
}

/// Creates a zeroed C `can_frame`.
#[inline(always)]
fn can_frame_default() -> can_frame {
    unsafe { mem::zeroed() }
}

/// `setsockopt` wrapper for slice-valued options.
fn set_socket_option_mult<T>(
    fd: c_int,
    level: c_int,
    name: c_int,
    values: &[T],
) -> io::Result<()> {
    let ret = if values.is_empty() {
        // can't pass in a ptr to a 0-len slice, pass a null ptr instead
        unsafe { libc::setsockopt(fd, level, name, ptr::null(), 0) }
    } else {
        unsafe {
            libc::setsockopt(
                fd,
                level,
                name,
                values.as_ptr().cast(),
                mem::size_of_val(values) as socklen_t,
            )
        }
    };

    if ret != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}
