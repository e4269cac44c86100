pub mod d400_collection_stats;
