use imprint_core::{
    Author, AuthorRepository, Book, BookRepository, Contract, ContractQuery, ContractRepository,
    MemoryAuthorRepository, MemoryBookRepository, MemoryContractRepository, RepoError,
    ValidationError,
};
use uuid::Uuid;

#[test]
fn add_and_get_roundtrip() {
    let mut repo = MemoryContractRepository::new();
    let contract = Contract::new(Uuid::new_v4(), Uuid::new_v4(), "2024-01-01", 100);

    let id = repo.add(&contract).unwrap();
    let loaded = repo.get(id).unwrap().expect("contract should be found");
    assert_eq!(loaded, contract);
}

#[test]
fn add_duplicate_id_is_rejected_and_registry_unchanged() {
    let mut repo = MemoryContractRepository::new();
    let contract = Contract::new(Uuid::new_v4(), Uuid::new_v4(), "2024-01-01", 100);
    repo.add(&contract).unwrap();

    let err = repo.add(&contract).unwrap_err();
    assert!(matches!(err, RepoError::DuplicateContract(id) if id == contract.id));
    assert_eq!(repo.len(), 1);
}

#[test]
fn add_blank_date_registers_nothing() {
    let mut repo = MemoryContractRepository::new();
    let contract = Contract::new(Uuid::new_v4(), Uuid::new_v4(), "", 100);

    let err = repo.add(&contract).unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ValidationError::BlankContractDate)
    );
    assert!(repo.is_empty());
}

#[test]
fn list_by_date_matches_exact_text_across_authors() {
    let mut repo = MemoryContractRepository::new();
    let first = Contract::new(Uuid::new_v4(), Uuid::new_v4(), "1974-01-01", 5000);
    let unrelated = Contract::new(Uuid::new_v4(), Uuid::new_v4(), "1975-03-02", 100);
    let second = Contract::new(Uuid::new_v4(), Uuid::new_v4(), "1974-01-01", 250);

    repo.add(&first).unwrap();
    repo.add(&unrelated).unwrap();
    repo.add(&second).unwrap();

    let dated = repo.list(&ContractQuery::by_date("1974-01-01")).unwrap();
    assert_eq!(dated, vec![first, second]);

    let none = repo.list(&ContractQuery::by_date("2000-01-01")).unwrap();
    assert!(none.is_empty());
}

#[test]
fn list_by_author_preserves_registration_order() {
    let mut repo = MemoryContractRepository::new();
    let author = Uuid::new_v4();
    let other = Uuid::new_v4();

    let first = Contract::new(author, Uuid::new_v4(), "2024-01-01", 10);
    let second = Contract::new(author, Uuid::new_v4(), "2024-02-01", 20);
    repo.add(&first).unwrap();
    repo.add(&Contract::new(other, Uuid::new_v4(), "2024-01-15", 15))
        .unwrap();
    repo.add(&second).unwrap();

    let scoped = repo.list(&ContractQuery::by_author(author)).unwrap();
    assert_eq!(scoped, vec![first, second]);
}

#[test]
fn update_replaces_in_place_and_keeps_position() {
    let mut repo = MemoryContractRepository::new();
    let author = Uuid::new_v4();
    let first = Contract::new(author, Uuid::new_v4(), "2024-01-01", 10);
    let second = Contract::new(author, Uuid::new_v4(), "2024-02-01", 20);
    repo.add(&first).unwrap();
    repo.add(&second).unwrap();

    let amended = Contract {
        royalties: 99,
        ..first.clone()
    };
    repo.update(&amended).unwrap();

    let all = repo.list(&ContractQuery::default()).unwrap();
    assert_eq!(all, vec![amended, second]);
}

#[test]
fn update_rejects_invalid_record_without_storing() {
    let mut repo = MemoryContractRepository::new();
    let contract = Contract::new(Uuid::new_v4(), Uuid::new_v4(), "2024-01-01", 10);
    repo.add(&contract).unwrap();

    let broken = Contract {
        date: "   ".to_string(),
        ..contract.clone()
    };
    let err = repo.update(&broken).unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ValidationError::BlankContractDate)
    );

    let stored = repo.get(contract.id).unwrap().unwrap();
    assert_eq!(stored, contract);
}

#[test]
fn author_registry_lists_in_registration_order() {
    let mut repo = MemoryAuthorRepository::new();
    let first = Author::new("Ursula K. Le Guin");
    let second = Author::new("Octavia Butler");
    repo.add(&first).unwrap();
    repo.add(&second).unwrap();

    assert_eq!(repo.list().unwrap(), vec![first, second]);
}

#[test]
fn book_registry_contains_reflects_registration() {
    let mut repo = MemoryBookRepository::new();
    let book = Book::new("The Dispossessed");

    assert!(!repo.contains(book.id).unwrap());
    repo.add(&book).unwrap();
    assert!(repo.contains(book.id).unwrap());
}
