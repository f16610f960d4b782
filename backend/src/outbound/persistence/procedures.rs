//! Stored procedure invocations.
//!
//! Single-row procedures return the record columns plus nullable
//! `code_status`/`message_status`; a non-null `code_status` marks a sentinel
//! error row. List procedures return record columns only.

pub(super) const LIST_CLIENTS: &str = "SELECT * FROM sp_clientes_listar()";
pub(super) const FIND_CLIENT: &str = "SELECT * FROM sp_cliente_buscar($1)";
pub(super) const INSERT_CLIENT: &str = "SELECT * FROM sp_cliente_insertar($1, $2)";
pub(super) const UPDATE_CLIENT: &str = "SELECT * FROM sp_cliente_actualizar($1, $2, $3)";

pub(super) const LIST_PRODUCTS: &str = "SELECT * FROM sp_productos_listar()";
pub(super) const FIND_PRODUCT: &str = "SELECT * FROM sp_productos_buscar($1)";
pub(super) const INSERT_PRODUCT: &str = "SELECT * FROM sp_producto_insertar($1, $2, $3, $4)";
pub(super) const UPDATE_PRODUCT: &str =
    "SELECT * FROM sp_producto_actualizar($1, $2, $3, $4, $5)";

/// Opens `orden_cursor` (header) and `detalle_cursor` (lines).
///
/// Cursors live until the end of the enclosing transaction. When the header
/// is a sentinel row `detalle_cursor` may be left unopened, so it is fetched
/// only after a record header.
pub(super) const CREATE_ORDER: &str =
    "SELECT sp_ordenes_crear($1, $2, 'orden_cursor'::refcursor, 'detalle_cursor'::refcursor)";
pub(super) const FETCH_ORDER_HEADER: &str = "FETCH ALL FROM orden_cursor";
pub(super) const FETCH_ORDER_LINES: &str = "FETCH ALL FROM detalle_cursor";
