use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn clientreg(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("clientreg").unwrap();
    cmd.env("CLIENTREG_DATA", data_dir.path()).env("NO_COLOR", "1");
    cmd
}

fn add_ana(data_dir: &TempDir) {
    clientreg(data_dir)
        .args([
            "add",
            "--name",
            "Ana Souza",
            "--phone",
            "31988887777",
            "--cpf",
            "35413515006",
            "--plate",
            "hgf4321",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cliente criado: Ana Souza"));
}

#[test]
fn fresh_registry_lists_demo_clients() {
    let dir = TempDir::new().unwrap();
    clientreg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("João Silva"))
        .stdout(predicate::str::contains("Maria Santos"))
        .stdout(predicate::str::contains("529.982.247-25"));
}

#[test]
fn demo_clients_can_be_edited_and_deleted_before_any_write() {
    let dir = TempDir::new().unwrap();
    assert!(!dir.path().join("clients.json").exists());

    clientreg(&dir)
        .args(["edit", "1", "--plate", "jkl5555"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cliente atualizado: João Silva"));

    clientreg(&dir)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cliente removido: Maria Santos"));

    clientreg(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("JKL-5555"))
        .stdout(predicate::str::contains("Maria Santos").not());
}

#[test]
fn add_list_edit_delete_workflow() {
    let dir = TempDir::new().unwrap();
    add_ana(&dir);
    assert!(dir.path().join("clients.json").exists());

    // Ana sorts before the demo clients and comes back masked.
    clientreg(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Ana Souza"))
        .stdout(predicate::str::contains("(31) 98888-7777"))
        .stdout(predicate::str::contains("354.135.150-06"))
        .stdout(predicate::str::contains("HGF-4321"));

    clientreg(&dir)
        .args(["search", "35413515006"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Souza"))
        .stdout(predicate::str::contains("Maria Santos").not());

    clientreg(&dir)
        .args(["edit", "1", "--plate", "jkl5555"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cliente atualizado: Ana Souza"));

    clientreg(&dir)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JKL-5555"));

    clientreg(&dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cliente removido: Ana Souza"));

    clientreg(&dir)
        .args(["list", "-s", "ana souza"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhum cliente encontrado"));
}

#[test]
fn duplicate_cpf_is_rejected() {
    let dir = TempDir::new().unwrap();
    clientreg(&dir)
        .args([
            "add",
            "--name",
            "Outro João",
            "--phone",
            "11912345678",
            "--cpf",
            "529.982.247-25",
            "--plate",
            "ABC-9999",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CPF já cadastrado no sistema"));
}

#[test]
fn invalid_fields_are_listed_and_nothing_is_saved() {
    let dir = TempDir::new().unwrap();
    clientreg(&dir)
        .args(["add", "--name", "Al", "--cpf", "11111111111"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nome: Nome deve ter no mínimo 3 caracteres"))
        .stderr(predicate::str::contains("Telefone: Telefone é obrigatório"))
        .stderr(predicate::str::contains("CPF: CPF inválido"))
        .stderr(predicate::str::contains("Placa: Placa do carro é obrigatória"));
    assert!(!dir.path().join("clients.json").exists());
}

#[test]
fn unknown_target_fails() {
    let dir = TempDir::new().unwrap();
    clientreg(&dir)
        .args(["view", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No client at index 9"));
}

#[test]
fn config_can_turn_off_demo_seed() {
    let dir = TempDir::new().unwrap();
    clientreg(&dir)
        .args(["config", "seed-demo", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed-demo set to false"));

    clientreg(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file = clients.json"))
        .stdout(predicate::str::contains("seed-demo = false"));

    clientreg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhum cliente encontrado."));
}
