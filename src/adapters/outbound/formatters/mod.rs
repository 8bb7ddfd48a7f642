/// Report formatters - output syntax implementations
mod csv_formatter;
mod table_formatter;

pub use csv_formatter::CsvFormatter;
pub use table_formatter::TableFormatter;
