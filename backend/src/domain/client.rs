//! Client records.
//!
//! Name length and identity-number format and uniqueness are enforced by the
//! stored procedures; the domain only checks that inserts do not carry an id.

/// Client snapshot as returned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    /// Server-generated identifier; `0` on a not-yet-inserted client.
    pub id: i64,
    /// Display name (3 to 100 characters, checked externally).
    pub name: String,
    /// Legal identity number, e.g. `0801-1990-12345`.
    pub identity: String,
}

/// Insert input: a client without identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: String,
    pub identity: String,
}

/// Structural validation failures for client inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClientValidationError {
    #[error("El clienteId debe ser 0 para un nuevo cliente.")]
    IdNotZero,
}

impl TryFrom<Client> for ClientDraft {
    type Error = ClientValidationError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        if client.id != 0 {
            return Err(ClientValidationError::IdNotZero);
        }
        Ok(Self {
            name: client.name,
            identity: client.identity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn client(id: i64) -> Client {
        Client {
            id,
            name: "Juan Pérez".to_owned(),
            identity: "0801-1990-12345".to_owned(),
        }
    }

    #[rstest]
    fn draft_keeps_fields_for_zero_id() {
        let draft = ClientDraft::try_from(client(0)).expect("zero id is accepted");
        assert_eq!(draft.name, "Juan Pérez");
        assert_eq!(draft.identity, "0801-1990-12345");
    }

    #[rstest]
    #[case(1)]
    #[case(-3)]
    fn draft_rejects_non_zero_id(#[case] id: i64) {
        let err = ClientDraft::try_from(client(id)).expect_err("non-zero id");
        assert_eq!(
            err.to_string(),
            "El clienteId debe ser 0 para un nuevo cliente."
        );
    }
}
