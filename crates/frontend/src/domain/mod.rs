pub mod a001_rag_chat;
