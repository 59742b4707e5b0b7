//! Fixed token text written by the emitters.

pub(super) const WS: &str = " ";
pub(super) const LPAREN: &str = "(";
pub(super) const RPAREN: &str = ")";
pub(super) const O_ASN: &str = "=";
pub(super) const O_AMP: &str = "&";
pub(super) const O_SPLAT: &str = "*";
pub(super) const O_DSPLAT: &str = "**";
pub(super) const T_COLON: &str = ":";
pub(super) const T_DQUOTE: &str = "\"";
