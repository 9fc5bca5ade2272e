use std::fmt::Debug;

pub enum Error {
    MissingUri,
    MongoDb(mongodb::error::Error),
}

impl From<mongodb::error::Error> for Error {
    fn from(e: mongodb::error::Error) -> Self {
        Error::MongoDb(e)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingUri => write!(f, "MONGODB_URI environment variable is not set"),
            Error::MongoDb(e) => write!(f, "MongoDB Error: {}", e),
        }
    }
}
