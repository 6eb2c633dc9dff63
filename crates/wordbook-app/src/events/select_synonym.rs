use wordbook_core::Session;
use wordbook_types::SynonymRef;

pub fn handle_synonym_selection(session: &Session, synonym: SynonymRef) {
    let started = match synonym {
        SynonymRef::Word(word) => {
            tracing::debug!("Synonym selected: {}", word);
            session.select_synonym(&word)
        }
        SynonymRef::Index(index) => {
            tracing::debug!("Synonym selected at position {}", index);
            session.select_synonym_at(index)
        }
    };

    if started.is_none() {
        println!("No such synonym");
    }
}
