//! The Chinook reference schema and a sample of its rows.
//!
//! Both are built on demand and returned by value; callers build them once
//! and pass references to the writer.

use crate::data::{Dataset, TableData, Value};
use crate::schema::{
    datetime, decimal, int32, string, DatabaseSchema, ForeignKeySchema, TableSchema,
};

/// Name of the generated database.
pub const DATABASE_NAME: &str = "Chinook";

/// Builds the 11-table Chinook schema, tables in dependency order.
#[must_use]
pub fn chinook_schema() -> DatabaseSchema {
    DatabaseSchema::new(DATABASE_NAME)
        .table(
            TableSchema::new("Genre")
                .column(int32("GenreId").primary_key())
                .column(string("Name", 120)),
        )
        .table(
            TableSchema::new("MediaType")
                .column(int32("MediaTypeId").primary_key())
                .column(string("Name", 120)),
        )
        .table(
            TableSchema::new("Artist")
                .column(int32("ArtistId").primary_key())
                .column(string("Name", 120)),
        )
        .table(
            TableSchema::new("Album")
                .column(int32("AlbumId").primary_key())
                .column(string("Title", 160).not_null())
                .column(int32("ArtistId").not_null())
                .foreign_key(ForeignKeySchema::new("ArtistId", "Artist", "ArtistId")),
        )
        .table(
            TableSchema::new("Track")
                .column(int32("TrackId").primary_key())
                .column(string("Name", 200).not_null())
                .column(int32("AlbumId"))
                .column(int32("MediaTypeId").not_null())
                .column(int32("GenreId"))
                .column(string("Composer", 220))
                .column(int32("Milliseconds").not_null())
                .column(int32("Bytes"))
                .column(decimal("UnitPrice").not_null())
                .foreign_key(ForeignKeySchema::new("AlbumId", "Album", "AlbumId"))
                .foreign_key(ForeignKeySchema::new("GenreId", "Genre", "GenreId"))
                .foreign_key(ForeignKeySchema::new("MediaTypeId", "MediaType", "MediaTypeId")),
        )
        .table(
            TableSchema::new("Employee")
                .column(int32("EmployeeId").primary_key())
                .column(string("LastName", 20).not_null())
                .column(string("FirstName", 20).not_null())
                .column(string("Title", 30))
                .column(int32("ReportsTo"))
                .column(datetime("BirthDate"))
                .column(datetime("HireDate"))
                .column(string("Address", 70))
                .column(string("City", 40))
                .column(string("State", 40))
                .column(string("Country", 40))
                .column(string("PostalCode", 10))
                .column(string("Phone", 24))
                .column(string("Fax", 24))
                .column(string("Email", 60))
                .foreign_key(ForeignKeySchema::new("ReportsTo", "Employee", "EmployeeId")),
        )
        .table(
            TableSchema::new("Customer")
                .column(int32("CustomerId").primary_key())
                .column(string("FirstName", 40).not_null())
                .column(string("LastName", 20).not_null())
                .column(string("Company", 80))
                .column(string("Address", 70))
                .column(string("City", 40))
                .column(string("State", 40))
                .column(string("Country", 40))
                .column(string("PostalCode", 10))
                .column(string("Phone", 24))
                .column(string("Fax", 24))
                .column(string("Email", 60).not_null())
                .column(int32("SupportRepId"))
                .foreign_key(ForeignKeySchema::new("SupportRepId", "Employee", "EmployeeId")),
        )
        .table(
            TableSchema::new("Invoice")
                .column(int32("InvoiceId").primary_key())
                .column(int32("CustomerId").not_null())
                .column(datetime("InvoiceDate").not_null())
                .column(string("BillingAddress", 70))
                .column(string("BillingCity", 40))
                .column(string("BillingState", 40))
                .column(string("BillingCountry", 40))
                .column(string("BillingPostalCode", 10))
                .column(decimal("Total").not_null())
                .foreign_key(ForeignKeySchema::new("CustomerId", "Customer", "CustomerId")),
        )
        .table(
            TableSchema::new("InvoiceLine")
                .column(int32("InvoiceLineId").primary_key())
                .column(int32("InvoiceId").not_null())
                .column(int32("TrackId").not_null())
                .column(decimal("UnitPrice").not_null())
                .column(int32("Quantity").not_null())
                .foreign_key(ForeignKeySchema::new("InvoiceId", "Invoice", "InvoiceId"))
                .foreign_key(ForeignKeySchema::new("TrackId", "Track", "TrackId")),
        )
        .table(
            TableSchema::new("Playlist")
                .column(int32("PlaylistId").primary_key())
                .column(string("Name", 120)),
        )
        .table(
            TableSchema::new("PlaylistTrack")
                .column(int32("PlaylistId").not_null())
                .column(int32("TrackId").not_null())
                .primary_key(&["PlaylistId", "TrackId"])
                .foreign_key(ForeignKeySchema::new("PlaylistId", "Playlist", "PlaylistId"))
                .foreign_key(ForeignKeySchema::new("TrackId", "Track", "TrackId")),
        )
}

fn int(value: i64) -> Value {
    Value::Int(value)
}

fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}

fn dec(value: &str) -> Value {
    Value::Decimal(value.to_string())
}

fn date(value: &str) -> Value {
    Value::Date(value.to_string())
}

const GENRES: [&str; 25] = [
    "Rock",
    "Jazz",
    "Metal",
    "Alternative & Punk",
    "Rock And Roll",
    "Blues",
    "Latin",
    "Reggae",
    "Pop",
    "Soundtrack",
    "Bossa Nova",
    "Easy Listening",
    "Heavy Metal",
    "R&B/Soul",
    "Electronica/Dance",
    "World",
    "Hip Hop/Rap",
    "Science Fiction",
    "TV Shows",
    "Sci Fi & Fantasy",
    "Drama",
    "Comedy",
    "Alternative",
    "Classical",
    "Opera",
];

const MEDIA_TYPES: [&str; 5] = [
    "MPEG audio file",
    "Protected AAC audio file",
    "Protected MPEG-4 video file",
    "Purchased AAC audio file",
    "AAC audio file",
];

/// Builds a referentially consistent sample of the Chinook rows.
///
/// Lookup tables (genres, media types, employees) are complete; the other
/// tables hold a slice that includes the first and last row of each table.
#[must_use]
pub fn sample_dataset() -> Dataset {
    let mut genre = TableData::new("Genre", &["GenreId", "Name"]);
    for (id, name) in (1..).zip(GENRES) {
        genre = genre.row(vec![int(id), text(name)]);
    }

    let mut media_type = TableData::new("MediaType", &["MediaTypeId", "Name"]);
    for (id, name) in (1..).zip(MEDIA_TYPES) {
        media_type = media_type.row(vec![int(id), text(name)]);
    }

    let mut artist = TableData::new("Artist", &["ArtistId", "Name"]);
    for (id, name) in [
        (1, "AC/DC"),
        (2, "Accept"),
        (3, "Aerosmith"),
        (68, "Miles Davis"),
        (88, "Guns N' Roses"),
        (156, "The Office"),
        (275, "Philip Glass Ensemble"),
    ] {
        artist = artist.row(vec![int(id), text(name)]);
    }

    let mut album = TableData::new("Album", &["AlbumId", "Title", "ArtistId"]);
    for (id, title, artist_id) in [
        (1, "For Those About To Rock We Salute You", 1),
        (2, "Balls to the Wall", 2),
        (3, "Restless and Wild", 2),
        (48, "The Essential Miles Davis [Disc 1]", 68),
        (250, "The Office, Season 1", 156),
        (347, "Koyaanisqatsi (Soundtrack from the Motion Picture)", 275),
    ] {
        album = album.row(vec![int(id), text(title), int(artist_id)]);
    }

    let track = TableData::new(
        "Track",
        &[
            "TrackId",
            "Name",
            "AlbumId",
            "MediaTypeId",
            "GenreId",
            "Composer",
            "Milliseconds",
            "Bytes",
            "UnitPrice",
        ],
    )
    .row(vec![
        int(1),
        text("For Those About To Rock (We Salute You)"),
        int(1),
        int(1),
        int(1),
        text("Angus Young, Malcolm Young, Brian Johnson"),
        int(343_719),
        int(11_170_334),
        dec("0.99"),
    ])
    .row(vec![
        int(2),
        text("Balls to the Wall"),
        int(2),
        int(2),
        int(1),
        Value::Null,
        int(342_562),
        int(5_510_424),
        dec("0.99"),
    ])
    .row(vec![
        int(3),
        text("Fast As a Shark"),
        int(3),
        int(2),
        int(1),
        text("F. Baltes, S. Kaufman, U. Dirkscneider & W. Hoffman"),
        int(230_619),
        int(3_990_994),
        dec("0.99"),
    ])
    .row(vec![
        int(4),
        text("Restless and Wild"),
        int(3),
        int(2),
        int(1),
        text("F. Baltes, R.A. Smith-Diesel, S. Kaufman, U. Dirkscneider & W. Hoffman"),
        int(252_051),
        int(4_331_779),
        dec("0.99"),
    ])
    .row(vec![
        int(597),
        text("Now's The Time"),
        int(48),
        int(1),
        int(2),
        text("Miles Davis"),
        int(197_459),
        int(6_358_868),
        dec("0.99"),
    ])
    .row(vec![
        int(3177),
        text("Hot Girl"),
        int(250),
        int(3),
        int(19),
        Value::Null,
        int(1_325_458),
        int(267_836_576),
        dec("1.99"),
    ])
    .row(vec![
        int(3503),
        text("Koyaanisqatsi"),
        int(347),
        int(2),
        int(10),
        text("Philip Glass"),
        int(206_005),
        int(3_305_164),
        dec("0.99"),
    ]);

    Dataset::new()
        .table(genre)
        .table(media_type)
        .table(artist)
        .table(album)
        .table(track)
        .table(employees())
        .table(customers())
        .table(invoices())
        .table(invoice_lines())
        .table(
            TableData::new("Playlist", &["PlaylistId", "Name"])
                .row(vec![int(1), text("Music")])
                .row(vec![int(17), text("Heavy Metal Classic")])
                .row(vec![int(18), text("On-The-Go 1")]),
        )
        .table(playlist_tracks())
}

fn employees() -> TableData {
    let mut table = TableData::new(
        "Employee",
        &[
            "EmployeeId",
            "LastName",
            "FirstName",
            "Title",
            "ReportsTo",
            "BirthDate",
            "HireDate",
            "Address",
            "City",
            "State",
            "Country",
            "PostalCode",
            "Phone",
            "Fax",
            "Email",
        ],
    );

    #[rustfmt::skip]
    let rows = [
        (1, "Adams", "Andrew", "General Manager", None, "1962-02-18", "2002-08-14", "11120 Jasper Ave NW", "Edmonton", "T5K 2N1", "+1 (780) 428-9482", "+1 (780) 428-3457", "andrew@chinookcorp.com"),
        (2, "Edwards", "Nancy", "Sales Manager", Some(1), "1958-12-08", "2002-05-01", "825 8 Ave SW", "Calgary", "T2P 2T3", "+1 (403) 262-3443", "+1 (403) 262-3322", "nancy@chinookcorp.com"),
        (3, "Peacock", "Jane", "Sales Support Agent", Some(2), "1973-08-29", "2002-04-01", "1111 6 Ave SW", "Calgary", "T2P 5M5", "+1 (403) 262-3443", "+1 (403) 262-6712", "jane@chinookcorp.com"),
        (4, "Park", "Margaret", "Sales Support Agent", Some(2), "1947-09-19", "2003-05-03", "683 10 Street SW", "Calgary", "T2P 5G3", "+1 (403) 263-4423", "+1 (403) 263-4289", "margaret@chinookcorp.com"),
        (5, "Johnson", "Steve", "Sales Support Agent", Some(2), "1965-03-03", "2003-10-17", "7727B 41 Ave", "Calgary", "T3B 1Y7", "1 (780) 836-9987", "1 (780) 836-9543", "steve@chinookcorp.com"),
        (6, "Mitchell", "Michael", "IT Manager", Some(1), "1973-07-01", "2003-10-17", "5827 Bowness Road NW", "Calgary", "T3B 0C5", "+1 (403) 246-9887", "+1 (403) 246-9899", "michael@chinookcorp.com"),
        (7, "King", "Robert", "IT Staff", Some(6), "1970-05-29", "2004-01-02", "590 Columbia Boulevard West", "Lethbridge", "T1K 5N8", "+1 (403) 456-9986", "+1 (403) 456-8485", "robert@chinookcorp.com"),
        (8, "Callahan", "Laura", "IT Staff", Some(6), "1968-01-09", "2004-03-04", "923 7 ST NW", "Lethbridge", "T1H 1Y8", "+1 (403) 467-3351", "+1 (403) 467-8772", "laura@chinookcorp.com"),
    ];

    for (id, last, first, title, reports_to, born, hired, address, city, postal, phone, fax, email) in rows {
        table = table.row(vec![
            int(id),
            text(last),
            text(first),
            text(title),
            reports_to.map_or(Value::Null, int),
            date(born),
            date(hired),
            text(address),
            text(city),
            text("AB"),
            text("Canada"),
            text(postal),
            text(phone),
            text(fax),
            text(email),
        ]);
    }
    table
}

fn customers() -> TableData {
    TableData::new(
        "Customer",
        &[
            "CustomerId",
            "FirstName",
            "LastName",
            "Company",
            "Address",
            "City",
            "State",
            "Country",
            "PostalCode",
            "Phone",
            "Fax",
            "Email",
            "SupportRepId",
        ],
    )
    .row(vec![
        int(1),
        text("Luís"),
        text("Gonçalves"),
        text("Embraer - Empresa Brasileira de Aeronáutica S.A."),
        text("Av. Brigadeiro Faria Lima, 2170"),
        text("São José dos Campos"),
        text("SP"),
        text("Brazil"),
        text("12227-000"),
        text("+55 (12) 3923-5555"),
        text("+55 (12) 3923-5566"),
        text("luisg@embraer.com.br"),
        int(3),
    ])
    .row(vec![
        int(2),
        text("Leonie"),
        text("Köhler"),
        Value::Null,
        text("Theodor-Heuss-Straße 34"),
        text("Stuttgart"),
        Value::Null,
        text("Germany"),
        text("70174"),
        text("+49 0711 2842222"),
        Value::Null,
        text("leonekohler@surfeu.de"),
        int(5),
    ])
    .row(vec![
        int(58),
        text("Manoj"),
        text("Pareek"),
        Value::Null,
        text("12,Community Centre"),
        text("Delhi"),
        Value::Null,
        text("India"),
        text("110017"),
        text("+91 0124 39883988"),
        Value::Null,
        text("manoj.pareek@rediff.com"),
        int(3),
    ])
    .row(vec![
        int(59),
        text("Puja"),
        text("Srivastava"),
        Value::Null,
        text("3,Raj Bhavan Road"),
        text("Bangalore"),
        Value::Null,
        text("India"),
        text("560001"),
        text("+91 080 22289999"),
        Value::Null,
        text("puja_srivastava@yahoo.in"),
        int(3),
    ])
}

fn invoices() -> TableData {
    TableData::new(
        "Invoice",
        &[
            "InvoiceId",
            "CustomerId",
            "InvoiceDate",
            "BillingAddress",
            "BillingCity",
            "BillingState",
            "BillingCountry",
            "BillingPostalCode",
            "Total",
        ],
    )
    .row(vec![
        int(1),
        int(2),
        date("2021-01-01"),
        text("Theodor-Heuss-Straße 34"),
        text("Stuttgart"),
        Value::Null,
        text("Germany"),
        text("70174"),
        dec("1.98"),
    ])
    .row(vec![
        int(412),
        int(58),
        date("2025-12-22"),
        text("12,Community Centre"),
        text("Delhi"),
        Value::Null,
        text("India"),
        text("110017"),
        dec("1.99"),
    ])
}

fn invoice_lines() -> TableData {
    let mut table = TableData::new(
        "InvoiceLine",
        &["InvoiceLineId", "InvoiceId", "TrackId", "UnitPrice", "Quantity"],
    );
    for (id, invoice, track, price) in [
        (1, 1, 2, "0.99"),
        (2, 1, 4, "0.99"),
        (2240, 412, 3177, "1.99"),
    ] {
        table = table.row(vec![int(id), int(invoice), int(track), dec(price), int(1)]);
    }
    table
}

fn playlist_tracks() -> TableData {
    let mut table = TableData::new("PlaylistTrack", &["PlaylistId", "TrackId"]);
    for (playlist, track) in [
        (1, 1),
        (1, 2),
        (1, 3),
        (1, 4),
        (1, 3503),
        (17, 1),
        (17, 2),
        (17, 3),
        (17, 4),
        (18, 597),
    ] {
        table = table.row(vec![int(playlist), int(track)]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_shape() {
        let schema = chinook_schema();
        schema.validate().unwrap();

        assert_eq!(schema.tables.len(), 11);
        assert_eq!(
            schema.tables.iter().map(|t| t.foreign_keys.len()).sum::<usize>(),
            11
        );
        let playlist_track = schema.get_table("PlaylistTrack").unwrap();
        assert!(playlist_track.is_composite_key());
        assert_eq!(schema.get_table("Track").unwrap().columns.len(), 9);
    }

    #[test]
    fn test_tables_follow_dependency_order() {
        let schema = chinook_schema();
        let names: Vec<&str> = schema.table_names().collect();
        for (index, table) in schema.tables.iter().enumerate() {
            for fk in &table.foreign_keys {
                let target = names
                    .iter()
                    .position(|n| *n == fk.references_table)
                    .unwrap();
                assert!(target <= index, "{} before {}", table.name, fk.references_table);
            }
        }
    }

    #[test]
    fn test_sample_dataset_is_consistent() {
        let schema = chinook_schema();
        let data = sample_dataset();
        data.validate(&schema).unwrap();

        assert_eq!(data.get("Genre").unwrap().rows.len(), 25);
        assert_eq!(data.get("MediaType").unwrap().rows.len(), 5);
        assert_eq!(data.get("Employee").unwrap().rows.len(), 8);
        assert_eq!(
            data.get("Genre").unwrap().rows.last().unwrap()[1],
            Value::Text("Opera".into())
        );
    }

    #[test]
    fn test_sample_foreign_keys_resolve() {
        let schema = chinook_schema();
        let data = sample_dataset();

        for table in &schema.tables {
            let Some(rows) = data.get(&table.name) else {
                continue;
            };
            for fk in &table.foreign_keys {
                let column = rows.columns.iter().position(|c| *c == fk.columns[0]).unwrap();
                let target = data.get(&fk.references_table).unwrap();
                let key = target
                    .columns
                    .iter()
                    .position(|c| *c == fk.references_columns[0])
                    .unwrap();

                for row in &rows.rows {
                    if row[column] == Value::Null {
                        continue;
                    }
                    assert!(
                        target.rows.iter().any(|r| r[key] == row[column]),
                        "{}.{} = {:?} has no parent",
                        table.name,
                        fk.columns[0],
                        row[column]
                    );
                }
            }
        }
    }
}
