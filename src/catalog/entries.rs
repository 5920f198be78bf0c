// Catalog data
//
// Order here is the display order of the command palette.

use super::{CatalogEntry, Category, DangerLevel};

pub(super) static ENTRIES: &[CatalogEntry] = &[
    // 查詢/瀏覽 (Query)
    CatalogEntry {
        name: "ls",
        template: "ls -l",
        summary: "ls：列出目錄內容。",
        detail: "基本用法：\n\
                 \x20 ls              列出目前目錄的檔案和資料夾\n\
                 \x20 ls -l           長格式顯示，包含權限、擁有者、大小、修改時間\n\
                 \x20 ls -a           顯示所有檔案（包含隱藏檔，以 . 開頭）\n\
                 \x20 ls -la          結合 -l 和 -a，長格式顯示所有檔案\n\
                 \x20 ls -lh          長格式顯示，檔案大小以人類可讀格式（KB, MB, GB）顯示\n\
                 \x20 ls -R           遞迴顯示子目錄內容\n\
                 \x20 ls -t           依修改時間排序（最新的在前）\n\
                 \x20 ls -S           依檔案大小排序（大的在前）\n\
                 \x20 ls /path/to/dir 列出指定目錄的內容\n\
                 \n\
                 範例：\n\
                 \x20 • ls -lah - 顯示所有檔案（含隱藏檔），長格式，人類可讀大小\n\
                 \x20 • ls -lt - 依時間排序顯示檔案\n\
                 \x20 • ls *.txt - 只顯示 .txt 結尾的檔案",
        danger: DangerLevel::Low,
        category: Category::Query,
    },
    CatalogEntry {
        name: "pwd",
        template: "pwd",
        summary: "pwd：顯示目前所在的工作目錄。",
        detail: "基本用法：\n\
                 \x20 pwd     顯示目前工作目錄的完整路徑（絕對路徑）\n\
                 \x20 pwd -P  顯示實際路徑（解析符號連結）\n\
                 \x20 pwd -L  顯示邏輯路徑（保留符號連結，預設行為）\n\
                 \n\
                 說明：\n\
                 \x20 • pwd 會輸出目前 shell 所在的完整路徑（absolute path），方便確認自己在檔案系統中的位置\n\
                 \x20 • 例如輸出：/home/classuser 或 /var/www/html",
        danger: DangerLevel::Low,
        category: Category::Query,
    },
    CatalogEntry {
        name: "cat",
        template: "cat /etc/os-release",
        summary: "cat：將檔案內容直接輸出到終端機。",
        detail: "基本用法：\n\
                 \x20 cat file.txt            顯示檔案內容\n\
                 \x20 cat file1.txt file2.txt 連接多個檔案並顯示\n\
                 \x20 cat -n file.txt         顯示檔案內容並加上行號\n\
                 \x20 cat -b file.txt         顯示檔案內容，只對非空行加上行號\n\
                 \x20 cat > newfile.txt       建立新檔案（輸入內容後按 Ctrl+D 結束）\n\
                 \x20 cat >> file.txt         將輸入內容追加到檔案末尾\n\
                 \n\
                 常用範例：\n\
                 \x20 • cat /etc/os-release - 查看系統版本資訊\n\
                 \x20 • cat /etc/passwd - 查看使用者帳號列表\n\
                 \x20 • cat file1.txt file2.txt > combined.txt - 合併兩個檔案",
        danger: DangerLevel::Low,
        category: Category::Query,
    },
    CatalogEntry {
        name: "find",
        template: "find /home -name '*.txt'",
        summary: "find：搜尋檔案或目錄。",
        detail: "基本用法：\n\
                 \x20 find /path -name '*.txt'  搜尋指定目錄下所有 .txt 檔案\n\
                 \x20 find . -type f            搜尋目前目錄下所有檔案（不含目錄）\n\
                 \x20 find . -type d            搜尋目前目錄下所有目錄\n\
                 \x20 find . -size +100M        搜尋大於 100MB 的檔案\n\
                 \x20 find . -mtime -7          搜尋最近 7 天內修改的檔案\n\
                 \x20 find . -exec rm {} \\;     對搜尋結果執行指令（危險！）\n\
                 \n\
                 常用範例：\n\
                 \x20 • find /home -name '*.txt' - 在 /home 下尋找所有 .txt 檔案\n\
                 \x20 • find . -name '*.log' -delete - 刪除所有 .log 檔案（小心使用）",
        danger: DangerLevel::Low,
        category: Category::Query,
    },
    CatalogEntry {
        name: "grep",
        template: "grep 'error' /var/log/syslog",
        summary: "grep：在檔案中搜尋特定文字。",
        detail: "基本用法：\n\
                 \x20 grep 'pattern' file.txt               在檔案中搜尋包含 pattern 的行\n\
                 \x20 grep -i 'pattern' file.txt            忽略大小寫搜尋\n\
                 \x20 grep -r 'pattern' /path               遞迴搜尋目錄下所有檔案\n\
                 \x20 grep -n 'pattern' file.txt            顯示行號\n\
                 \x20 grep -v 'pattern' file.txt            顯示不包含 pattern 的行（反向搜尋）\n\
                 \x20 grep -E 'pattern1|pattern2' file.txt  使用正則表達式搜尋（擴展模式）\n\
                 \n\
                 常用範例：\n\
                 \x20 • grep 'error' /var/log/syslog - 在系統日誌中搜尋 error\n\
                 \x20 • grep -ri 'TODO' . - 在目前目錄遞迴搜尋 TODO（忽略大小寫）",
        danger: DangerLevel::Low,
        category: Category::Query,
    },
    CatalogEntry {
        name: "head",
        template: "head -n 20 file.txt",
        summary: "head：顯示檔案的前幾行。",
        detail: "基本用法：\n\
                 \x20 head file.txt                顯示檔案前 10 行（預設）\n\
                 \x20 head -n 20 file.txt          顯示檔案前 20 行\n\
                 \x20 head -c 100 file.txt         顯示檔案前 100 個字元\n\
                 \x20 head -q file1.txt file2.txt  顯示多個檔案的前 10 行（不顯示檔名）",
        danger: DangerLevel::Low,
        category: Category::Query,
    },
    CatalogEntry {
        name: "tail",
        template: "tail -f /var/log/syslog",
        summary: "tail：顯示檔案的最後幾行。",
        detail: "基本用法：\n\
                 \x20 tail file.txt         顯示檔案最後 10 行（預設）\n\
                 \x20 tail -n 20 file.txt   顯示檔案最後 20 行\n\
                 \x20 tail -f file.txt      持續監看檔案，顯示新增內容（常用於日誌）\n\
                 \x20 tail -F file.txt      類似 -f，但檔案被刪除重建後仍會繼續監看\n\
                 \x20 tail -c 100 file.txt  顯示檔案最後 100 個字元\n\
                 \n\
                 常用範例：\n\
                 \x20 • tail -f /var/log/syslog - 即時查看系統日誌\n\
                 \x20 • tail -n 50 error.log - 查看錯誤日誌的最後 50 行",
        danger: DangerLevel::Low,
        category: Category::Query,
    },
    // 檔案操作 (File Operations)
    CatalogEntry {
        name: "cp",
        template: "cp source.txt dest.txt",
        summary: "cp：複製檔案或目錄。",
        detail: "基本用法：\n\
                 \x20 cp file.txt newfile.txt     複製檔案\n\
                 \x20 cp -r dir1 dir2             遞迴複製目錄\n\
                 \x20 cp -i file.txt dest.txt     覆蓋前先詢問\n\
                 \x20 cp -u file.txt dest.txt     只複製較新的檔案（更新模式）\n\
                 \x20 cp -p file.txt dest.txt     保留原始檔案的屬性（權限、時間戳等）\n\
                 \x20 cp file1 file2 file3 /dest/ 複製多個檔案到目錄",
        danger: DangerLevel::Medium,
        category: Category::FileOperations,
    },
    CatalogEntry {
        name: "mv",
        template: "mv old.txt new.txt",
        summary: "mv：移動或重新命名檔案。",
        detail: "基本用法：\n\
                 \x20 mv file.txt newname.txt     重新命名檔案\n\
                 \x20 mv file.txt /path/to/       移動檔案到指定目錄\n\
                 \x20 mv -i file.txt dest.txt     覆蓋前先詢問確認\n\
                 \x20 mv file1 file2 file3 /dest/ 移動多個檔案到目錄\n\
                 \x20 mv -v file.txt dest.txt     顯示詳細資訊（verbose）",
        danger: DangerLevel::Medium,
        category: Category::FileOperations,
    },
    CatalogEntry {
        name: "mkdir",
        template: "mkdir -p /path/to/directory",
        summary: "mkdir：建立目錄。",
        detail: "基本用法：\n\
                 \x20 mkdir dirname          建立單一目錄\n\
                 \x20 mkdir -p /path/to/dir  自動建立所需的父目錄（如果不存在）\n\
                 \x20 mkdir dir1 dir2 dir3   一次建立多個目錄\n\
                 \x20 mkdir -m 755 dirname   建立目錄並設定權限（755 = rwxr-xr-x）\n\
                 \x20 mkdir -v dirname       顯示詳細資訊",
        danger: DangerLevel::Low,
        category: Category::FileOperations,
    },
    CatalogEntry {
        name: "rmdir",
        template: "rmdir empty_dir",
        summary: "rmdir：刪除空目錄。",
        detail: "`rmdir` 只能刪除空的目錄，如果目錄內有檔案會失敗。要刪除非空目錄需要使用 `rm -r`。",
        danger: DangerLevel::Medium,
        category: Category::FileOperations,
    },
    CatalogEntry {
        name: "touch",
        template: "touch newfile.txt",
        summary: "touch：建立空檔案或更新檔案時間戳記。",
        detail: "`touch` 如果檔案不存在會建立一個空檔案，如果檔案已存在則會更新其存取和修改時間。",
        danger: DangerLevel::Low,
        category: Category::FileOperations,
    },
    // 權限設定 (Permission)
    CatalogEntry {
        name: "chmod",
        template: "chmod 755 script.sh",
        summary: "chmod：修改檔案或目錄的權限。",
        detail: "基本用法：\n\
                 \x20 chmod 755 file.txt   設定權限：擁有者=rwx，群組=r-x，其他人=r-x\n\
                 \x20 chmod u+x file.txt   給擁有者加上執行權限\n\
                 \x20 chmod g-w file.txt   移除群組的寫入權限\n\
                 \x20 chmod o+r file.txt   給其他人加上讀取權限\n\
                 \x20 chmod -R 755 dir/    遞迴設定目錄下所有檔案權限\n\
                 \x20 chmod a+x file.txt   給所有人加上執行權限（a = all）\n\
                 \n\
                 權限說明：\n\
                 \x20 • 數字模式：7=rwx（讀寫執行），5=r-x（讀執行），4=r--（只讀）\n\
                 \x20 • 字母模式：u=擁有者，g=群組，o=其他人，a=所有人\n\
                 \x20 • 755 常用於可執行的 script 檔，讓其他人可以執行但不能修改",
        danger: DangerLevel::Medium,
        category: Category::Permission,
    },
    CatalogEntry {
        name: "chown",
        template: "chown root:root /some/file",
        summary: "chown：變更檔案的擁有者與群組。",
        detail: "`root:root` 的格式是 `使用者:群組`。這個指令會把 `/some/file` 的擁有者和群組都改成 root，一般用在系統檔案或需要特定帳號管理的檔案上，若設定錯誤可能造成權限問題。",
        danger: DangerLevel::Medium,
        category: Category::Permission,
    },
    CatalogEntry {
        name: "umask",
        template: "umask 022",
        summary: "umask：設定預設檔案權限遮罩。",
        detail: "`umask` 用來設定新建立檔案和目錄的預設權限。`022` 表示其他人不能寫入，常用來提高安全性。",
        danger: DangerLevel::Low,
        category: Category::Permission,
    },
    // 系統操作 (System Control)
    CatalogEntry {
        name: "rm",
        template: "rm test.txt",
        summary: "rm：刪除檔案。",
        detail: "基本用法：\n\
                 \x20 rm file.txt    刪除檔案\n\
                 \x20 rm -i file.txt 刪除前先詢問確認\n\
                 \x20 rm -r dir/     遞迴刪除目錄及其內容\n\
                 \x20 rm -f file.txt 強制刪除，不詢問（危險！）\n\
                 \x20 rm -rf dir/    ⚠️ 極度危險！強制遞迴刪除，無法復原\n\
                 \x20 rm *.txt       刪除所有 .txt 檔案\n\
                 \n\
                 ⚠️ 警告：\n\
                 \x20 • rm 不會將檔案送到資源回收桶，而是直接從檔案系統移除\n\
                 \x20 • rm -rf 是非常危險的組合，絕對不要對 / 或重要系統目錄使用\n\
                 \x20 • 建議使用 -i 選項，刪除前先確認",
        danger: DangerLevel::High,
        category: Category::SystemControl,
    },
    CatalogEntry {
        name: "systemctl",
        template: "systemctl restart nginx",
        summary: "systemctl：在使用 systemd 的系統上管理服務。",
        detail: "`restart` 會先停止再重新啟動指定服務，這裡以 `nginx` 為例。這個指令常用於套用新的設定檔，但若對 sshd 之類的關鍵服務使用，可能導致遠端連線中斷，要特別小心。",
        danger: DangerLevel::High,
        category: Category::SystemControl,
    },
    CatalogEntry {
        name: "ps",
        template: "ps aux",
        summary: "ps：顯示目前執行的程序。",
        detail: "`ps aux` 會顯示所有使用者的所有程序，包含詳細資訊如 CPU、記憶體使用率。常用來查看系統資源使用情況。",
        danger: DangerLevel::Low,
        category: Category::SystemControl,
    },
    CatalogEntry {
        name: "kill",
        template: "kill -9 1234",
        summary: "kill：終止執行中的程序。",
        detail: "`kill` 用來終止程序，`-9` 是強制終止訊號（SIGKILL），無法被程序忽略。使用前要確認程序 ID 正確，避免誤殺重要程序。",
        danger: DangerLevel::High,
        category: Category::SystemControl,
    },
    CatalogEntry {
        name: "top",
        template: "top",
        summary: "top：即時顯示系統程序和資源使用情況。",
        detail: "`top` 會即時更新顯示系統中最耗資源的程序，可以用來監控系統效能。按 `q` 離開，按 `k` 可以終止程序。",
        danger: DangerLevel::Low,
        category: Category::SystemControl,
    },
    // 網路操作 (Network)
    CatalogEntry {
        name: "ping",
        template: "ping -c 4 google.com",
        summary: "ping：測試網路連線。",
        detail: "`ping` 用來測試與目標主機的網路連線是否正常。`-c 4` 表示只發送 4 個封包後停止，預設會持續執行直到手動中斷。",
        danger: DangerLevel::Low,
        category: Category::Network,
    },
    CatalogEntry {
        name: "curl",
        template: "curl https://example.com",
        summary: "curl：從命令列下載或傳送資料。",
        detail: "`curl` 是一個強大的網路工具，可以下載檔案、測試 API、傳送 HTTP 請求等。常用選項包括 `-O`（儲存檔案）、`-L`（跟隨重新導向）。",
        danger: DangerLevel::Low,
        category: Category::Network,
    },
    CatalogEntry {
        name: "wget",
        template: "wget https://example.com/file.zip",
        summary: "wget：從網路下載檔案。",
        detail: "`wget` 專門用來下載檔案，支援 HTTP、HTTPS、FTP 等協定。可以遞迴下載整個網站（`-r`），但要注意不要造成伺服器負擔。",
        danger: DangerLevel::Low,
        category: Category::Network,
    },
    CatalogEntry {
        name: "netstat",
        template: "netstat -tuln",
        summary: "netstat：顯示網路連線狀態。",
        detail: "`netstat` 可以顯示網路連線、路由表、介面統計等資訊。`-tuln` 顯示 TCP/UDP 連線和監聽的埠號，常用來檢查服務是否正常運作。",
        danger: DangerLevel::Low,
        category: Category::Network,
    },
];
