mod record;

use proc_macro::TokenStream;
use proc_macro_error::proc_macro_error;

/// Derives `sqlbulk::Record` for a struct with named fields.
///
/// Field attributes, all under `#[insert(...)]`:
///
/// - `editable = false`: leave the field out of generated inserts; its type
///   does not need to implement `ToSqlValue`
/// - `rename = "Column"`: column name, defaults to the field name
/// - `display`: render through `Display` as an escaped text literal
#[proc_macro_error]
#[proc_macro_derive(Record, attributes(insert))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record_impl(input)
}
