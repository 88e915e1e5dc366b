pub mod d001_catalog_summary;
