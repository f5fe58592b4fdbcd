use stockroom_core::DomainError;
use stockroom_inventory::Notice;

/// Turn a rejected action into the inline message shown on the next render.
pub fn domain_error_to_notice(err: &DomainError) -> Notice {
    match err {
        DomainError::Validation(msg) => Notice::error(msg.clone()),
        DomainError::OutOfRange { position, len: 0 } => Notice::error(format!(
            "Invalid position {position}: the stockroom is empty"
        )),
        DomainError::OutOfRange { position, len } => Notice::error(format!(
            "Invalid position {position}: choose a position from 0 to {}",
            len - 1
        )),
    }
}
