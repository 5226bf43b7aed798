
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared::error::{Error, Result};

/// Component id of a candidate used for RTP, or for RTP with RTCP multiplexed.
pub const COMPONENT_RTP: u16 = 1;
/// Component id of a candidate used for RTCP only.
pub const COMPONENT_RTCP: u16 = 2;

const ICE_COMPONENT_RTP_STR: &str = "rtp";
const ICE_COMPONENT_RTCP_STR: &str = "rtcp";

/// Describes whether an ICE transport is used for RTP or for RTCP.
///
/// Every ICE candidate carries a component id which tells the remote peer
/// which media sub-stream the candidate belongs to. Protocols multiplexed with
/// RTP (for example data channels, or RTCP under `rtcp-mux`) share the RTP
/// component.
///
/// `Unknown` is the default value and the result of converting any text that
/// is not a canonical token. It has no wire representation, so encoding it
/// with [`RTCIceComponent::as_str`] or [`RTCIceComponent::component_id`]
/// fails with [`Error::ErrUnknownType`].
///
/// # Examples
///
/// ```
/// use rtc_ice_component::RTCIceComponent;
///
/// let rtp: RTCIceComponent = "rtp".into();
/// assert_eq!(rtp, RTCIceComponent::Rtp);
/// assert_eq!(rtp.as_str(), Ok("rtp"));
///
/// // matching is case-sensitive
/// assert_eq!(RTCIceComponent::from("RTP"), RTCIceComponent::Unknown);
/// assert!(RTCIceComponent::Unknown.as_str().is_err());
/// ```
///
/// Callers that prefer an explicit error over the `Unknown` sentinel can use
/// [`str::parse`]:
///
/// ```
/// use rtc_ice_component::RTCIceComponent;
///
/// assert_eq!("rtcp".parse::<RTCIceComponent>(), Ok(RTCIceComponent::Rtcp));
/// assert!("2".parse::<RTCIceComponent>().is_err());
/// ```
///
/// # Specifications
///
/// - [RFC 8445 Section 5.1.1.1] - Gathering Candidates
/// - [W3C RTCIceComponent]
///
/// [RFC 8445 Section 5.1.1.1]: https://datatracker.ietf.org/doc/html/rfc8445#section-5.1.1.1
/// [W3C RTCIceComponent]: https://w3c.github.io/webrtc-pc/#rtcicecomponent-enum
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RTCIceComponent {
    /// The zero value. Never encoded.
    #[default]
    Unknown,

    /// The transport is used for RTP (or RTCP multiplexing). Encoded as
    /// component id 1 in the candidate attribute.
    Rtp,

    /// The transport is used for RTCP. Encoded as component id 2 in the
    /// candidate attribute.
    Rtcp,
}

impl RTCIceComponent {
    /// Returns the canonical token used in candidate attributes.
    pub fn as_str(&self) -> Result<&'static str> {
        match *self {
            RTCIceComponent::Rtp => Ok(ICE_COMPONENT_RTP_STR),
            RTCIceComponent::Rtcp => Ok(ICE_COMPONENT_RTCP_STR),
            RTCIceComponent::Unknown => Err(Error::ErrUnknownType),
        }
    }

    /// Returns the numeric component id carried on the wire.
    pub fn component_id(&self) -> Result<u16> {
        match *self {
            RTCIceComponent::Rtp => Ok(COMPONENT_RTP),
            RTCIceComponent::Rtcp => Ok(COMPONENT_RTCP),
            RTCIceComponent::Unknown => Err(Error::ErrUnknownType),
        }
    }
}

/// takes a string and converts it to RTCIceComponent
impl From<&str> for RTCIceComponent {
    fn from(raw: &str) -> Self {
        match raw {
            ICE_COMPONENT_RTP_STR => RTCIceComponent::Rtp,
            ICE_COMPONENT_RTCP_STR => RTCIceComponent::Rtcp,
            _ => {
                log::trace!("unrecognized ice component {raw:?}");
                RTCIceComponent::Unknown
            }
        }
    }
}

impl From<u16> for RTCIceComponent {
    fn from(component_id: u16) -> Self {
        match component_id {
            COMPONENT_RTP => RTCIceComponent::Rtp,
            COMPONENT_RTCP => RTCIceComponent::Rtcp,
            _ => RTCIceComponent::Unknown,
        }
    }
}

impl FromStr for RTCIceComponent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match RTCIceComponent::from(s) {
            RTCIceComponent::Unknown => Err(Error::ErrUnknownType),
            component => Ok(component),
        }
    }
}

impl fmt::Display for RTCIceComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Ok(s) => write!(f, "{s}"),
            Err(err) => write!(f, "{err}"),
        }
    }
}

impl Serialize for RTCIceComponent {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = self.as_str().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for RTCIceComponent {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<RTCIceComponent>().map_err(serde::de::Error::custom)
    }
}
